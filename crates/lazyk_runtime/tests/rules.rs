mod common;

use common::{load_term, runtime};
use lazyk_runtime::{Cell, Fault, Rule, RuntimeConfig};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

fn whnf_render(src: &str) -> String {
    let (mut rt, _) = runtime(RuntimeConfig::default(), b"");
    let term = load_term(&mut rt, src);
    let value = rt.whnf(term).unwrap();
    rt.render(value, 256)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32, .. ProptestConfig::default()
    })]
    #[test]
    fn identity_returns_its_numeral(n in any::<u32>()) {
        let (mut rt, _) = runtime(RuntimeConfig::default(), b"");
        let num = rt.alloc_num(n).unwrap();
        rt.push_root(num).unwrap();
        let id = rt.alloc_num(1).unwrap();
        rt.push_root(id).unwrap();
        let app = rt.alloc_apply(id, num).unwrap();
        let value = rt.whnf(app).unwrap();
        prop_assert_eq!(rt.cell(value), Cell::Num(n));
    }
}

#[test]
fn k_discards_its_second_argument_unevaluated() {
    let (mut rt, _) = runtime(RuntimeConfig::default(), b"");
    // The second argument faults if it is ever reduced.
    let term = load_term(&mut rt, "``k[7]`+k");
    let Cell::Apply(_, poison) = rt.cell(term) else {
        panic!("not an application");
    };
    let before = rt.cell(poison);
    let value = rt.whnf(term).unwrap();
    assert_eq!(rt.cell(value), Cell::Num(7));
    assert_eq!(rt.cell(poison), before);
}

#[test]
fn s_distributes_its_argument() {
    for (x, y) in [("k", "k"), ("c", "k"), ("`k+", "i"), ("s", "`kk")] {
        let z = "[9]";
        let direct = whnf_render(&format!("```s{x}{y}{z}"));
        let expanded = whnf_render(&format!("``{x}{z}`{y}{z}"));
        assert_eq!(direct, expanded, "x={x} y={y}");
    }
}

#[test]
fn cons_selects_head_and_tail() {
    let (mut rt, _) = runtime(RuntimeConfig::default(), b"");
    let pair = load_term(&mut rt, "``c[3][4]");
    for (selector, expected) in [(Rule::K, 3), (Rule::KI, 4)] {
        let app = rt.select(pair, selector).unwrap();
        let value = rt.whnf(app).unwrap();
        assert_eq!(rt.cell(value), Cell::Num(expected), "{selector:?}");
    }
}

#[test]
fn numerals_iterate_increment() {
    for n in [0u32, 1, 2, 5, 97, 1_000_000, u32::MAX] {
        let (mut rt, _) = runtime(RuntimeConfig::default(), b"");
        let num = rt.alloc_num(n).unwrap();
        rt.set_program_root(Some(num));
        assert_eq!(rt.int_value(num).unwrap(), n);
    }
}

#[test]
fn numeral_iteration_without_shortcut() {
    // The inner iteration's argument is not yet a numeral, so the outer one
    // unfolds into nested increments.
    let (mut rt, _) = runtime(RuntimeConfig::default(), b"");
    let term = load_term(&mut rt, "``[3]+``[2]+[10]");
    let value = rt.whnf(term).unwrap();
    assert_eq!(rt.cell(value), Cell::Num(15));
    assert!(rt.stats().reductions > 3);
}

#[test]
fn zero_applied_to_anything_is_identity() {
    assert_eq!(whnf_render("``[0]k[5]"), "[5]");
}

#[test]
fn ki_returns_identity() {
    let (mut rt, _) = runtime(RuntimeConfig::default(), b"");
    let prim = rt.alloc_prim(Rule::KI).unwrap();
    rt.set_program_root(Some(prim));
    let arg = rt.alloc_num(42).unwrap();
    rt.push_root(arg).unwrap();
    let app = rt.alloc_apply(prim, arg).unwrap();
    let value = rt.whnf(app).unwrap();
    assert_eq!(rt.cell(value), Cell::Num(1));
}

#[test]
fn increment_of_non_number_faults() {
    let (mut rt, _) = runtime(RuntimeConfig::default(), b"");
    let term = load_term(&mut rt, "`+k");
    assert!(matches!(
        rt.whnf(term),
        Err(Fault::IncOnNonNumber { tag: "prim" })
    ));
    assert_eq!(rt.root_depth(), 0);
}

#[test]
fn numeral_overflow_faults() {
    for src in ["`+[4294967295]", "``[4294967295]+[1]"] {
        let (mut rt, _) = runtime(RuntimeConfig::default(), b"");
        let term = load_term(&mut rt, src);
        assert!(matches!(rt.whnf(term), Err(Fault::NumeralOverflow)), "{src}");
    }
}

#[test]
fn numeral_iterator_requires_a_numeral() {
    let (mut rt, _) = runtime(RuntimeConfig::default(), b"");
    let k = rt.alloc_prim(Rule::K).unwrap();
    rt.push_root(k).unwrap();
    let iter = rt.alloc_cell(Cell::NumIter(k, k)).unwrap();
    rt.push_root(iter).unwrap();
    let app = rt.alloc_apply(iter, k).unwrap();
    assert!(matches!(rt.whnf(app), Err(Fault::NumIterWithoutNum)));
}

#[test]
fn captured_argument_is_traced() {
    assert_eq!(whnf_render("`k[8]"), "`k[8]");
    assert_eq!(whnf_render("`s`kk"), "`s`kk");
    assert_eq!(whnf_render("``sk+"), "``sk+");
    assert_eq!(whnf_render("``c+i"), "``c+i");
}

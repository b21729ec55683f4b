pub mod heap;
pub mod roots;

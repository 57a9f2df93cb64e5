pub mod assembler;
pub mod orchestrator;
pub mod stub;

pub use assembler::assemble;
pub use orchestrator::OrderService;

/// Use mimalloc as the global allocator.
/// 2-3x faster than glibc malloc for small allocations, which dominate
/// here: every token lives in its own String and the merge sort allocates
/// one short-lived Vec per merge.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod common;
pub mod report;
pub mod sort;
pub mod tokenize;

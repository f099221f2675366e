//! Full-slice sorts built from the kernels, registered with the shared test harness.

pub mod rust_heapsort;
pub mod rust_sort_n;

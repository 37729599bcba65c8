// Proportional budget redistribution
pub mod allocator;

pub use allocator::{AllocationError, BudgetAllocator, ShareBasis, ZeroSharePolicy};

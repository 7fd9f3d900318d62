//! The financial aggregation engine: pure reductions of raw record
//! collections into derived facts. Every function here is synchronous,
//! allocation-fresh, and idempotent; callers pass full snapshots and
//! recompute on every change.

pub mod balance;
pub mod cost;
pub mod inventory;

pub use balance::{customer_balances, CustomerBalance};
pub use cost::{cost_breakdown, project_profit, CostBreakdown, ProjectProfit};
pub use inventory::{project_consumption_net, stock_balances, StockBalance, StockKey};

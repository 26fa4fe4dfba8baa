mod export;
mod store;
mod water;

pub use export::export_plan_csv;
pub use store::DietPlanStore;
pub use water::WaterLog;

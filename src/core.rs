pub mod analysis_type;
pub mod billing_period;
pub mod degree_days;
pub mod dhw;
pub mod dispersion;
pub mod fuel;
pub mod heat_load;
pub mod home;
pub mod search;
pub mod summary;
pub mod winter_period;

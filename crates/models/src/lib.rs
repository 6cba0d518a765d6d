pub mod errors;
pub mod db;
pub mod manufacturer;
pub mod vehicle_model;

#[cfg(test)]
mod tests;

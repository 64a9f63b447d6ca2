pub mod errors;
pub mod db;
pub mod cafe;

#[cfg(test)]
mod tests;

pub mod chrono;
pub mod enums;
#[cfg(test)]
mod tests;

pub mod errors;
pub mod db;
pub mod post;

#[cfg(test)]
mod tests;

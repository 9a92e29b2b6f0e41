#![no_std]

pub mod contract;
mod metadata;
#[cfg(test)]
mod tests;

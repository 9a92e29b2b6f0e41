#![no_std]

pub mod core;
pub mod events;
pub mod storage;

#[cfg(test)]
mod tests;

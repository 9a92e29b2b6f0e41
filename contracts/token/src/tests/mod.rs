#![cfg(test)]

mod helpers;

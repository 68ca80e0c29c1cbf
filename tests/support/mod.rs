#![allow(dead_code)]

pub mod mock_buffer;
pub mod mock_host;

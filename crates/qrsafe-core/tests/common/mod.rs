#![allow(dead_code)]

pub mod threat_server;

mod common;

mod aggregate;

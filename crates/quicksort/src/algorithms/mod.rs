pub mod lomuto;
pub mod recursive;
pub mod tail_loop;

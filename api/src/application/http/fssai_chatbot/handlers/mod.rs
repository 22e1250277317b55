pub mod query_fssai;

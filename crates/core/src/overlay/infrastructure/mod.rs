pub mod frame_catalog;

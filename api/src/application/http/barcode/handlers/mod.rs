pub mod lookup_barcode;

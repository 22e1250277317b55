use std::future::Future;

use crate::domain::{barcode::entities::BarcodeInfo, common::entities::app_errors::CoreError};

#[cfg_attr(test, mockall::automock)]
pub trait BarcodeRepository: Send + Sync {
    fn lookup(
        &self,
        barcode: String,
    ) -> impl Future<Output = Result<Option<BarcodeInfo>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait BarcodeService: Send + Sync {
    fn lookup_barcode(
        &self,
        barcode: String,
    ) -> impl Future<Output = Result<Option<BarcodeInfo>, CoreError>> + Send;
}

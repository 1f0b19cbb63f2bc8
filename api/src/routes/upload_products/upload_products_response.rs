use serde::Serialize;

/// Response body confirming the upload.
#[derive(Debug, Serialize)]
pub struct UploadProductsResponse {
    /// How many products were accepted per tier.
    pub received: ReceivedCounts,
}

#[derive(Debug, Serialize)]
pub struct ReceivedCounts {
    pub visible: usize,
    pub full: usize,
}

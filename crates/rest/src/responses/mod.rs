//! Response envelope for successful API calls.
//!
//! Every successful endpoint (except DELETE, which returns an empty 204)
//! wraps its payload in the same JSON envelope:
//!
//! ```json
//! {
//!   "statusCode": 200,
//!   "success": true,
//!   "message": "Documents retrieved successfully",
//!   "data": { ... },
//!   "meta": { "pagination": { ... } }
//! }
//! ```

pub mod envelope;

pub use envelope::{ApiResponse, list_payload};

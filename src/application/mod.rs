mod averaging;

pub use averaging::AveragingService;

#[cfg(test)]
pub(crate) use averaging::test_support;

mod apply_retention;

pub use apply_retention::ApplyRetentionUseCase;

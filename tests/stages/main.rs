mod code_fence_test;
mod list_test;
mod preprocess_test;

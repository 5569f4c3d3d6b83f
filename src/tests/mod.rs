mod completeness;
mod diagnostics;

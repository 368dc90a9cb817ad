#![no_main]

use glproc_gen::{BindingTableGenerator, FunctionOrder, FunctionSpec};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing must not panic; whatever parses must also generate
        if let Ok(spec) = FunctionSpec::parse(input) {
            let descriptors = spec.list_all_function_descriptors(FunctionOrder::Declared);
            let _ = BindingTableGenerator::default().generate(&descriptors);
        }
    }
});

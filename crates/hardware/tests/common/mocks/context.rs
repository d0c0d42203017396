use std::collections::BTreeMap;

use bnsim_core::isa::context::AsmContext;
use mockall::mock;

mock! {
    pub Context {}
    impl AsmContext for Context {
        fn functions(&self) -> &BTreeMap<usize, String>;
        fn labels(&self) -> &BTreeMap<usize, String>;
    }
}

/// A context with one function and one label.
pub fn with_symbols(func: (usize, &str), label: (usize, &str)) -> MockContext {
    let mut ctx = MockContext::new();
    let _ = ctx
        .expect_functions()
        .return_const(BTreeMap::from([(func.0, func.1.to_owned())]));
    let _ = ctx
        .expect_labels()
        .return_const(BTreeMap::from([(label.0, label.1.to_owned())]));
    ctx
}

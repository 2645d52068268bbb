pub mod applications;
pub mod core;
use alloc::fmt::Debug;

use ibc_primitives::prelude::*;

use crate::testapp::ibc::core::types::MockContext;

pub enum Expect {
    Success,
    Failure,
}

#[derive(Debug)]
pub struct Fixture<M: Debug> {
    pub ctx: MockContext,
    pub msg: M,
}

impl<M: Debug> Fixture<M> {
    pub fn generate_error_msg<T: Debug, E: Debug>(
        &self,
        expect: &Expect,
        process: &str,
        res: &Result<T, E>,
    ) -> String {
        let base_error = match expect {
            Expect::Success => "step failed!",
            Expect::Failure => "step passed but was supposed to fail!",
        };
        format!(
            "{process} {base_error} /n {res:?} /n {:?} /n {:?}",
            &self.msg, &self.ctx
        )
    }
}

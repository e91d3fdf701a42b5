use crate::catalog::PropertyCatalog;
use crate::commands::CmdResult;
use crate::error::{Result, SaarthiError};
use crate::model::PropertyId;

pub fn run<C: PropertyCatalog>(catalog: &C, id: PropertyId) -> Result<CmdResult> {
    let record = catalog
        .get(id)
        .ok_or(SaarthiError::PropertyNotFound(id))?
        .clone();
    Ok(CmdResult::default().with_listed_properties(vec![record]))
}

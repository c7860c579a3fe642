use crate::builder::GraphBuilder;
use crate::error::ConvertError;
use crate::form::IntoForm;

/// One-shot entry point: converts any form source into the exportable flow
/// document in a single call.
///
/// Equivalent to converting the source with [`IntoForm`], building the graph
/// with [`GraphBuilder`], and exporting with `Flow::to_json_string`, with all
/// three error phases folded into [`ConvertError`].
pub fn convert_form<F: IntoForm>(source: F) -> Result<String, ConvertError> {
    let form = source.into_form()?;
    let flow = GraphBuilder::new(form).build()?;
    Ok(flow.to_json_string()?)
}

use super::options::RenderOptions;
use crate::field::Field;

/// Append `#{<object>.<key>,jdbcType=<TYPE>[,typeHandler=<H>]}` to `out`.
pub(crate) fn write_placeholder<T>(
    out: &mut String,
    options: &RenderOptions,
    key: &str,
    field: &Field<T>,
) {
    out.push_str("#{");
    out.push_str(options.parameter_object());
    out.push('.');
    out.push_str(key);
    out.push_str(",jdbcType=");
    out.push_str(field.jdbc_type().as_str());
    if let Some(handler) = field.type_handler() {
        out.push_str(",typeHandler=");
        out.push_str(handler);
    }
    out.push('}');
}

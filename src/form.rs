//! Form State & Validation
//!
//! Field validation and the submit/delete state machines for the product
//! form. Validation is synchronous and settles before anything is allowed
//! to reach the network layer.

use crate::models::ItemInput;

/// Raw field values as typed into the form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    pub codigo: String,
    pub nombre: String,
    pub descripcion: String,
    pub precio_compra: String,
    pub precio_venta: String,
    pub stock: String,
}

/// Per-field messages; `None` means the field is valid
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub codigo: Option<&'static str>,
    pub nombre: Option<&'static str>,
    pub precio_compra: Option<&'static str>,
    pub precio_venta: Option<&'static str>,
    pub stock: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.codigo.is_none()
            && self.nombre.is_none()
            && self.precio_compra.is_none()
            && self.precio_venta.is_none()
            && self.stock.is_none()
    }
}

/// Create/submit lifecycle of the form
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitState {
    Editing,
    Submitting,
    Failed(String),
}

/// Delete lifecycle; the request is only issued out of `Confirming`
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteFlow {
    Idle,
    Confirming,
    Deleting,
    Failed(String),
}

impl DeleteFlow {
    /// Whether an accepted confirmation may advance to `Deleting`
    pub fn can_delete(&self) -> bool {
        matches!(self, DeleteFlow::Confirming)
    }
}

enum Fault {
    Empty,
    Invalid,
}

fn entero(raw: &str) -> Result<u32, Fault> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Fault::Empty);
    }
    raw.parse().map_err(|_| Fault::Invalid)
}

/// Non-negative decimal with at most 3 decimal places
fn decimal(raw: &str) -> Result<f64, Fault> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Fault::Empty);
    }
    // Plain digits and one optional point; the inputs use step="0.001"
    if !raw.chars().all(|c| c.is_ascii_digit() || c == '.') || raw.split('.').count() > 2 {
        return Err(Fault::Invalid);
    }
    if let Some(frac) = raw.split('.').nth(1) {
        if frac.len() > 3 {
            return Err(Fault::Invalid);
        }
    }
    raw.parse().map_err(|_| Fault::Invalid)
}

/// Validate raw fields into a create payload.
///
/// Either every field checks out and a complete [`ItemInput`] is produced,
/// or the offending fields are annotated and nothing leaves the form.
pub fn validate(fields: &FormFields) -> Result<ItemInput, FieldErrors> {
    let mut errors = FieldErrors::default();

    let codigo = entero(&fields.codigo).map_err(|f| {
        errors.codigo = Some(match f {
            Fault::Empty => "El código es obligatorio",
            Fault::Invalid => "El código debe ser un número válido",
        })
    });

    let nombre = fields.nombre.trim();
    if nombre.is_empty() {
        errors.nombre = Some("El nombre es obligatorio");
    }

    let precio_compra = decimal(&fields.precio_compra).map_err(|f| {
        errors.precio_compra = Some(match f {
            Fault::Empty => "El precio de compra es obligatorio",
            Fault::Invalid => "El precio de compra no es un valor válido",
        })
    });

    let precio_venta = decimal(&fields.precio_venta).map_err(|f| {
        errors.precio_venta = Some(match f {
            Fault::Empty => "El precio de venta es obligatorio",
            Fault::Invalid => "El precio de venta no es un valor válido",
        })
    });

    let stock = entero(&fields.stock).map_err(|f| {
        errors.stock = Some(match f {
            Fault::Empty => "El stock es obligatorio",
            Fault::Invalid => "El stock debe ser un número entero válido",
        })
    });

    let descripcion = fields.descripcion.trim();
    match (codigo, precio_compra, precio_venta, stock) {
        (Ok(codigo), Ok(precio_compra), Ok(precio_venta), Ok(stock)) if errors.is_empty() => {
            Ok(ItemInput {
                codigo,
                nombre: nombre.to_string(),
                descripcion: (!descripcion.is_empty()).then(|| descripcion.to_string()),
                precio_compra,
                precio_venta,
                stock,
            })
        }
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> FormFields {
        FormFields {
            codigo: "100".to_string(),
            nombre: "Tornillo".to_string(),
            descripcion: "Caja x100".to_string(),
            precio_compra: "0.5".to_string(),
            precio_venta: "1.2".to_string(),
            stock: "50".to_string(),
        }
    }

    #[test]
    fn complete_form_builds_the_payload() {
        let input = validate(&valid_fields()).unwrap();
        assert_eq!(input.codigo, 100);
        assert_eq!(input.nombre, "Tornillo");
        assert_eq!(input.descripcion.as_deref(), Some("Caja x100"));
        assert_eq!(input.precio_compra, 0.5);
        assert_eq!(input.precio_venta, 1.2);
        assert_eq!(input.stock, 50);
    }

    #[test]
    fn whole_number_prices_are_accepted() {
        let mut fields = valid_fields();
        fields.codigo = "7".to_string();
        fields.nombre = "Clavo".to_string();
        fields.precio_compra = "1".to_string();
        fields.precio_venta = "3".to_string();
        fields.stock = "10".to_string();
        let input = validate(&fields).unwrap();
        assert_eq!(input.precio_compra, 1.0);
        assert_eq!(input.precio_venta, 3.0);
    }

    #[test]
    fn missing_codigo_annotates_only_codigo() {
        let mut fields = valid_fields();
        fields.codigo = String::new();
        let errors = validate(&fields).unwrap_err();
        assert_eq!(errors.codigo, Some("El código es obligatorio"));
        assert!(errors.nombre.is_none());
        assert!(errors.precio_compra.is_none());
        assert!(errors.precio_venta.is_none());
        assert!(errors.stock.is_none());
    }

    #[test]
    fn empty_form_annotates_every_required_field() {
        let errors = validate(&FormFields::default()).unwrap_err();
        assert_eq!(errors.codigo, Some("El código es obligatorio"));
        assert_eq!(errors.nombre, Some("El nombre es obligatorio"));
        assert_eq!(errors.precio_compra, Some("El precio de compra es obligatorio"));
        assert_eq!(errors.precio_venta, Some("El precio de venta es obligatorio"));
        assert_eq!(errors.stock, Some("El stock es obligatorio"));
    }

    #[test]
    fn descripcion_is_optional() {
        let mut fields = valid_fields();
        fields.descripcion = "   ".to_string();
        let input = validate(&fields).unwrap();
        assert_eq!(input.descripcion, None);
    }

    #[test]
    fn whitespace_nombre_counts_as_missing() {
        let mut fields = valid_fields();
        fields.nombre = "   ".to_string();
        let errors = validate(&fields).unwrap_err();
        assert_eq!(errors.nombre, Some("El nombre es obligatorio"));
    }

    #[test]
    fn prices_reject_negatives_and_extra_decimals() {
        let mut fields = valid_fields();
        fields.precio_compra = "-1".to_string();
        assert!(validate(&fields).unwrap_err().precio_compra.is_some());

        fields.precio_compra = "0.1234".to_string();
        assert_eq!(
            validate(&fields).unwrap_err().precio_compra,
            Some("El precio de compra no es un valor válido")
        );

        fields.precio_compra = "0.123".to_string();
        assert!(validate(&fields).is_ok());
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let mut fields = valid_fields();
        fields.precio_venta = "1.2.3".to_string();
        assert!(validate(&fields).unwrap_err().precio_venta.is_some());

        fields = valid_fields();
        fields.codigo = "12a".to_string();
        assert_eq!(
            validate(&fields).unwrap_err().codigo,
            Some("El código debe ser un número válido")
        );
    }

    #[test]
    fn stock_must_be_a_whole_number() {
        let mut fields = valid_fields();
        fields.stock = "1.5".to_string();
        let errors = validate(&fields).unwrap_err();
        assert_eq!(errors.stock, Some("El stock debe ser un número entero válido"));
    }

    #[test]
    fn delete_only_proceeds_from_confirming() {
        assert!(!DeleteFlow::Idle.can_delete());
        assert!(DeleteFlow::Confirming.can_delete());
        assert!(!DeleteFlow::Deleting.can_delete());
        assert!(!DeleteFlow::Failed("HTTP 500".to_string()).can_delete());
    }
}

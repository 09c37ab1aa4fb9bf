//! Terminal rendering of validation outcomes.
//!
//! Display labels and certification detail copy are the issuer's, in
//! Spanish.

use certiva_client::{format_display_date, Certificate};

/// Certification program copy shown with every verified certificate.
const CERTIFICATION_PROGRAM: &str = "Recibió capacitación en Buenas Prácticas de Manipulación \
de Alimentos (BPM) de acuerdo con el Decreto 3075 de 1997 y la Resolución 2674 de 2013";

/// Endorsing authority.
const ENDORSED_BY: &str = "Seccional de Salud de Antioquia CSO-2018";

/// Certifier of record.
const CERTIFIER: &str = "William Alzate - NIT 712.121.85-2";

/// Render a verified certificate as the multi-line summary block.
#[must_use]
pub fn certificate_summary(certificate: &Certificate) -> String {
    format!(
        "Certificado Verificado\n\
         Certificación válida y registrada en nuestro sistema\n\
         \n\
         Nombre Completo:        {name}\n\
         Documento de Identidad: {document}\n\
         Tipo de Certificación:  {types}\n\
         Fecha de Expedición:    {issued}\n\
         Fecha de Vencimiento:   {expires}\n\
         \n\
         Certificación: {program}\n\
         Avalado por:   {endorsed}\n\
         Certificador:  {certifier}",
        name = certificate.full_name(),
        document = certificate.document_number,
        types = certificate.joined_types(),
        issued = format_display_date(certificate.issued_at),
        expires = format_display_date(certificate.expires_at),
        program = CERTIFICATION_PROGRAM,
        endorsed = ENDORSED_BY,
        certifier = CERTIFIER,
    )
}

/// Render a failure as the fixed notice block.
#[must_use]
pub fn failure_notice(message: &str) -> String {
    format!("Certificado no encontrado\n{message}")
}

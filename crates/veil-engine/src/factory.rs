//! Redactors pre-filtered to a single compliance standard

use veil_core::ComplianceStandard;

use crate::Redactor;

pub fn pci_dss_redactor() -> Redactor {
    Redactor::for_standard(ComplianceStandard::PciDss)
}

pub fn gdpr_redactor() -> Redactor {
    Redactor::for_standard(ComplianceStandard::Gdpr)
}

pub fn hipaa_redactor() -> Redactor {
    Redactor::for_standard(ComplianceStandard::Hipaa)
}

pub fn sox_redactor() -> Redactor {
    Redactor::for_standard(ComplianceStandard::Sox)
}

pub fn ccpa_redactor() -> Redactor {
    Redactor::for_standard(ComplianceStandard::Ccpa)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pci_dss_only() {
        let redactor = pci_dss_redactor();
        let active = redactor.active_rules();

        assert!(active.iter().all(|a| a.rule.covers(ComplianceStandard::PciDss)));

        let result = redactor.redact_text("card 4111 1111 1111 1111, ssn 123-45-6789");
        assert_eq!(result.redactions_made.len(), 1);
        assert!(result.redactions_made.contains_key("credit_card_full"));
        assert!(result.redacted_text.contains("123-45-6789"));
    }

    #[test]
    fn test_hipaa_ignores_level() {
        // Date of birth is a HIGH-only rule but HIPAA-tagged
        let result = hipaa_redactor().redact_text("DOB: 01/02/1990, mail a@b.com");

        assert_eq!(result.redactions_made.get("date_of_birth"), Some(&1));
        assert!(!result.redactions_made.contains_key("email_address"));
    }

    #[test]
    fn test_every_factory_has_rules() {
        for redactor in [
            pci_dss_redactor(),
            gdpr_redactor(),
            hipaa_redactor(),
            sox_redactor(),
            ccpa_redactor(),
        ] {
            assert!(!redactor.active_rules().is_empty());
        }
    }
}

//! Headline copy variants for the A/B campaign routes.
//!
//! Every variant shares the rest of the page; only the header's
//! headline/subheadline/call-to-action triple changes.

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct VariantCopy {
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub cta: &'static str,
}

const DEFAULT: VariantCopy = VariantCopy {
    headline: "Get the Disability Benefits You Deserve",
    subheadline: "Our experienced attorneys will fight for your rights and help you navigate the complex disability system. Let us handle your case while you focus on your health.",
    cta: "Call Now: (615) 451-1550",
};

const VARIANTS: [(&str, VariantCopy); 4] = [
    ("1", VariantCopy {
        headline: "Facing the System Alone? Not Anymore.",
        subheadline: "Spare yourself confusion and frustration. Our team guides you every step of the way.",
        cta: "Get Your Free Case Review",
    }),
    ("2", VariantCopy {
        headline: "Your Disability Claim Approved",
        subheadline: "Or You Pay Nothing. Start with a Free Consultation Today.",
        cta: "Start Free Consultation",
    }),
    ("3", VariantCopy {
        headline: "Disability Benefits Shouldn't Be a Battle",
        subheadline: "We Change That. Let Our Experience Guide Your Success.",
        cta: "Get Expert Help Now",
    }),
    ("4", VariantCopy {
        headline: "Can't Work Due to Disability?",
        subheadline: "Get Your Free Case Review Now. We'll Fight for Your Benefits.",
        cta: "Start Your Free Review",
    }),
];

pub fn default_copy() -> VariantCopy {
    DEFAULT
}

/// Looks up the copy for a route parameter. Unknown or empty identifiers
/// fall back to the default triple instead of erroring.
pub fn copy_for(id: &str) -> VariantCopy {
    VARIANTS
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, copy)| *copy)
        .unwrap_or(DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_map_to_their_copy() {
        assert_eq!(copy_for("1").headline, "Facing the System Alone? Not Anymore.");
        assert_eq!(copy_for("4").cta, "Start Your Free Review");
    }

    #[test]
    fn unknown_id_falls_back_to_default() {
        assert_eq!(copy_for("99"), default_copy());
        assert_eq!(copy_for(""), default_copy());
        assert_eq!(copy_for("variant-1"), default_copy());
    }

    #[test]
    fn variants_are_distinct_from_default() {
        for (id, copy) in VARIANTS {
            assert_ne!(copy, DEFAULT, "variant {} should differ from default", id);
        }
    }
}

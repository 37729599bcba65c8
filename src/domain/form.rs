use std::collections::HashMap;

use strum::IntoEnumIterator;

use super::section::Section;

/// Free-text and select fields of the campaign form.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, strum_macros::EnumIter)]
pub enum TextField {
    CampaignObjective,
    TargetAudience,
    ContentStrategy,
    PostSchedule,
    ComplianceStatus,
    PromoOffer,
    PrimaryCta,
    LandingPageUrl,
    UtmParams,
}

impl TextField {
    /// Storage key (also the control's element id).
    pub fn key(&self) -> &'static str {
        match self {
            TextField::CampaignObjective => "campaignObjective",
            TextField::TargetAudience => "targetAudience",
            TextField::ContentStrategy => "contentStrategy",
            TextField::PostSchedule => "postSchedule",
            TextField::ComplianceStatus => "complianceStatus",
            TextField::PromoOffer => "promoOffer",
            TextField::PrimaryCta => "primaryCta",
            TextField::LandingPageUrl => "landingPageUrl",
            TextField::UtmParams => "utmParams",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TextField::CampaignObjective => "Campaign objective",
            TextField::TargetAudience => "Target audience",
            TextField::ContentStrategy => "Content strategy",
            TextField::PostSchedule => "Posting schedule",
            TextField::ComplianceStatus => "Compliance status",
            TextField::PromoOffer => "Promotional offer",
            TextField::PrimaryCta => "Primary call to action",
            TextField::LandingPageUrl => "Landing page URL",
            TextField::UtmParams => "UTM parameters",
        }
    }

    pub fn section(&self) -> Section {
        match self {
            TextField::CampaignObjective => Section::Objectives,
            TextField::TargetAudience => Section::Audience,
            TextField::ContentStrategy | TextField::PostSchedule | TextField::ComplianceStatus => {
                Section::Content
            }
            TextField::PromoOffer
            | TextField::PrimaryCta
            | TextField::LandingPageUrl
            | TextField::UtmParams => Section::Tracking,
        }
    }

    /// Fixed choices for select-style fields. `None` means free text.
    pub fn options(&self) -> Option<&'static [&'static str]> {
        match self {
            TextField::CampaignObjective => Some(&[
                "Brand Awareness",
                "Lead Generation",
                "Website Traffic",
                "Conversions",
            ]),
            TextField::PostSchedule => Some(&["Daily", "3x per week", "Weekly"]),
            TextField::ComplianceStatus => Some(&["Pending Review", "Approved", "Needs Changes"]),
            _ => None,
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, TextField::TargetAudience | TextField::ContentStrategy)
    }

    fn default_value(&self) -> String {
        self.options()
            .and_then(|opts| opts.first())
            .map(|s| s.to_string())
            .unwrap_or_default()
    }
}

/// Checkbox flags in the tracking section.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, strum_macros::EnumIter)]
pub enum FlagField {
    GoogleAnalytics,
    MetaPixel,
    TagManager,
}

impl FlagField {
    pub fn key(&self) -> &'static str {
        match self {
            FlagField::GoogleAnalytics => "gaEnabled",
            FlagField::MetaPixel => "pixelEnabled",
            FlagField::TagManager => "gtmEnabled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FlagField::GoogleAnalytics => "Google Analytics",
            FlagField::MetaPixel => "Meta Pixel",
            FlagField::TagManager => "Google Tag Manager",
        }
    }
}

/// In-memory values of every text field and checkbox.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignForm {
    text: HashMap<TextField, String>,
    flags: HashMap<FlagField, bool>,
}

impl Default for CampaignForm {
    fn default() -> Self {
        Self {
            text: TextField::iter().map(|f| (f, f.default_value())).collect(),
            flags: FlagField::iter().map(|f| (f, false)).collect(),
        }
    }
}

impl CampaignForm {
    pub fn text(&self, field: TextField) -> &str {
        self.text.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn text_mut(&mut self, field: TextField) -> &mut String {
        self.text.entry(field).or_default()
    }

    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        self.text.insert(field, value.into());
    }

    pub fn flag(&self, field: FlagField) -> bool {
        self.flags.get(&field).copied().unwrap_or(false)
    }

    pub fn flag_mut(&mut self, field: FlagField) -> &mut bool {
        self.flags.entry(field).or_insert(false)
    }

    pub fn set_flag(&mut self, field: FlagField, value: bool) {
        self.flags.insert(field, value);
    }

    /// Text fields rendered in `section`, in declaration order.
    pub fn fields_in(section: Section) -> impl Iterator<Item = TextField> {
        TextField::iter().filter(move |f| f.section() == section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_fields_default_to_first_option() {
        let form = CampaignForm::default();
        assert_eq!(form.text(TextField::CampaignObjective), "Brand Awareness");
        assert_eq!(form.text(TextField::PromoOffer), "");
        assert!(!form.flag(FlagField::MetaPixel));
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<&str> = TextField::iter()
            .map(|f| f.key())
            .chain(FlagField::iter().map(|f| f.key()))
            .collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
        assert_eq!(total, 12);
    }

    #[test]
    fn tracking_section_holds_offer_and_url_fields() {
        let fields: Vec<TextField> = CampaignForm::fields_in(Section::Tracking).collect();
        assert_eq!(
            fields,
            vec![
                TextField::PromoOffer,
                TextField::PrimaryCta,
                TextField::LandingPageUrl,
                TextField::UtmParams,
            ]
        );
    }

    #[test]
    fn setters_overwrite_values() {
        let mut form = CampaignForm::default();
        form.set_text(TextField::UtmParams, "utm_source=spring");
        *form.flag_mut(FlagField::TagManager) = true;
        assert_eq!(form.text(TextField::UtmParams), "utm_source=spring");
        assert!(form.flag(FlagField::TagManager));
    }
}

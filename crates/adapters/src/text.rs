//! Text and id resolver strategies.

use msglog_domain::{
    Arg, Detail, MessageNumber, MessageTemplates, last_message_number_marker, sprintf,
    substitute_details,
};
use msglog_ports::{IdResolver, ResolveError, TextResolver};

/// Records never carry text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTextResolver;

impl TextResolver for NullTextResolver {
    fn resolve_text(
        &self,
        _number: MessageNumber,
        _details: &[Detail],
    ) -> Result<String, ResolveError> {
        Ok(String::new())
    }
}

/// Printf-style templates keyed by message number.
#[derive(Debug, Clone, Default)]
pub struct TemplatedTextResolver {
    templates: MessageTemplates,
}

impl TemplatedTextResolver {
    /// Create a resolver over `templates`.
    #[must_use]
    pub const fn new(templates: MessageTemplates) -> Self {
        Self { templates }
    }

    /// The templates in use.
    #[must_use]
    pub const fn templates(&self) -> &MessageTemplates {
        &self.templates
    }

    fn render(&self, key: MessageNumber, details: &[Detail]) -> Option<String> {
        let template = self.templates.get(key)?;
        let formatted = substitute_details(template, details);
        Some(formatted.until_first_error().to_string())
    }
}

impl TextResolver for TemplatedTextResolver {
    fn resolve_text(
        &self,
        number: MessageNumber,
        details: &[Detail],
    ) -> Result<String, ResolveError> {
        // A marker that yields no text falls back to the message number.
        let from_marker = last_message_number_marker(details)
            .and_then(|marker| self.render(marker, details))
            .filter(|text| !text.is_empty());
        Ok(from_marker
            .or_else(|| self.render(number, details))
            .unwrap_or_default())
    }
}

/// The message number in decimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultIdResolver;

impl IdResolver for DefaultIdResolver {
    fn resolve_id(
        &self,
        number: MessageNumber,
        _details: &[Detail],
    ) -> Result<String, ResolveError> {
        Ok(number.to_string())
    }
}

/// The message number substituted into a template such as `senzing-9999%04d`.
#[derive(Debug, Clone)]
pub struct TemplatedIdResolver {
    template: Box<str>,
}

impl TemplatedIdResolver {
    /// Create a resolver over `template`.
    #[must_use]
    pub fn new(template: impl Into<Box<str>>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl IdResolver for TemplatedIdResolver {
    fn resolve_id(
        &self,
        number: MessageNumber,
        _details: &[Detail],
    ) -> Result<String, ResolveError> {
        Ok(sprintf(&self.template, &[Arg::Int(number.get())]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn templates() -> MessageTemplates {
        MessageTemplates::new()
            .with(1, "Info for %s")
            .with(2000, "Value: %d")
            .with(3000, "%s and %s")
    }

    #[test]
    fn substitutes_details_positionally() -> Result<(), Box<dyn Error>> {
        let resolver = TemplatedTextResolver::new(templates());
        let text = resolver.resolve_text(MessageNumber::new(1), &[Detail::from("Bob")])?;
        assert_eq!(text, "Info for Bob");

        let text = resolver.resolve_text(
            MessageNumber::new(3000),
            &[Detail::from("A"), Detail::from("B")],
        )?;
        assert_eq!(text, "A and B");
        Ok(())
    }

    #[test]
    fn truncates_at_verb_error() -> Result<(), Box<dyn Error>> {
        let resolver = TemplatedTextResolver::new(templates());
        let text = resolver.resolve_text(MessageNumber::new(2000), &[Detail::from("abc")])?;
        assert_eq!(text, "Value: ");

        let text = resolver.resolve_text(MessageNumber::new(1), &[])?;
        assert_eq!(text, "Info for ");
        Ok(())
    }

    #[test]
    fn unknown_number_is_empty() -> Result<(), Box<dyn Error>> {
        let resolver = TemplatedTextResolver::new(templates());
        assert_eq!(resolver.resolve_text(MessageNumber::new(999), &[])?, "");
        assert_eq!(NullTextResolver.resolve_text(MessageNumber::new(1), &[])?, "");
        Ok(())
    }

    #[test]
    fn last_marker_selects_template() -> Result<(), Box<dyn Error>> {
        let resolver = TemplatedTextResolver::new(templates());
        let details = [
            Detail::message_number(3000),
            Detail::message_number(2000),
            Detail::from(42),
        ];
        let text = resolver.resolve_text(MessageNumber::new(1), &details)?;
        assert_eq!(text, "Value: 3000");
        Ok(())
    }

    #[test]
    fn marker_without_template_falls_back_to_number() -> Result<(), Box<dyn Error>> {
        let resolver = TemplatedTextResolver::new(templates());
        let details = [Detail::from("Bob"), Detail::message_number(77)];
        let text = resolver.resolve_text(MessageNumber::new(1), &details)?;
        assert_eq!(text, "Info for Bob");
        Ok(())
    }

    #[test]
    fn literal_markers_in_details_survive() -> Result<(), Box<dyn Error>> {
        let resolver = TemplatedTextResolver::new(templates());
        let text = resolver.resolve_text(MessageNumber::new(1), &[Detail::from("50%!off")])?;
        assert_eq!(text, "Info for 50%!off");
        Ok(())
    }

    #[test]
    fn ids_render_plain_or_templated() -> Result<(), Box<dyn Error>> {
        assert_eq!(DefaultIdResolver.resolve_id(MessageNumber::new(42), &[])?, "42");
        let resolver = TemplatedIdResolver::new("senzing-9999%04d");
        assert_eq!(
            resolver.resolve_id(MessageNumber::new(2), &[])?,
            "senzing-99990002"
        );
        Ok(())
    }
}

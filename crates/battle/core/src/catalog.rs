//! Immutable content catalog.
//!
//! The catalog replaces process-wide registries: all actions and
//! monster templates are handed to [`Catalog::new`] up front, validated
//! once, and shared read-only from then on. Reloading content means
//! constructing a new catalog.

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::action::ActionDef;
use crate::error::CatalogError;
use crate::monster::MonsterTemplate;
use crate::stats::StatKind;

/// Validated, immutable set of action and monster definitions.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    actions: BTreeMap<String, ActionDef>,
    templates: BTreeMap<String, Rc<MonsterTemplate>>,
}

impl Catalog {
    /// Builds a catalog, rejecting inconsistent definitions.
    ///
    /// Checks, in order per definition: reserved/duplicate action
    /// names, duplicate template names, positive template numbers, and
    /// that every action a template lists is defined.
    pub fn new(
        actions: impl IntoIterator<Item = ActionDef>,
        templates: impl IntoIterator<Item = MonsterTemplate>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();

        for action in actions {
            if action.name().is_empty() {
                return Err(CatalogError::ReservedActionName);
            }
            if catalog.actions.contains_key(action.name()) {
                return Err(CatalogError::DuplicateAction(action.name().to_owned()));
            }
            catalog.actions.insert(action.name().to_owned(), action);
        }

        for template in templates {
            validate_template(&template)?;
            if catalog.templates.contains_key(template.name()) {
                return Err(CatalogError::DuplicateTemplate(template.name().to_owned()));
            }
            for action_name in template.action_names() {
                if !catalog.actions.contains_key(action_name) {
                    return Err(CatalogError::UnknownActionReference {
                        template: template.name().to_owned(),
                        action: action_name.clone(),
                    });
                }
            }
            catalog
                .templates
                .insert(template.name().to_owned(), Rc::new(template));
        }

        Ok(catalog)
    }

    /// Looks up an action. The empty name resolves to the built-in
    /// pass action.
    pub fn action(&self, name: &str) -> Option<ActionDef> {
        if name.is_empty() {
            return Some(ActionDef::pass());
        }
        self.actions.get(name).cloned()
    }

    pub fn template(&self, name: &str) -> Option<&Rc<MonsterTemplate>> {
        self.templates.get(name)
    }

    /// All actions, in name order.
    pub fn actions(&self) -> impl Iterator<Item = &ActionDef> {
        self.actions.values()
    }

    /// All templates, in name order.
    pub fn templates(&self) -> impl Iterator<Item = &Rc<MonsterTemplate>> {
        self.templates.values()
    }
}

fn validate_template(template: &MonsterTemplate) -> Result<(), CatalogError> {
    let invalid = |field| CatalogError::InvalidTemplate {
        template: template.name().to_owned(),
        field,
    };
    if template.max_health() == 0 {
        return Err(invalid("max health"));
    }
    for (kind, field) in [
        (StatKind::Atk, "ATK"),
        (StatKind::Def, "DEF"),
        (StatKind::Spd, "SPD"),
    ] {
        if template.base_stat(kind) == 0 {
            return Err(invalid(field));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::effect::{DamageEffect, EffectKind, TargetSide};
    use crate::combat::Power;
    use crate::element::Element;

    fn strike() -> ActionDef {
        ActionDef::new(
            "Strike",
            Element::Normal,
            vec![EffectKind::Damage(DamageEffect::new(
                100,
                TargetSide::Target,
                Power::Basic(50),
            ))],
        )
    }

    fn template(name: &str) -> MonsterTemplate {
        MonsterTemplate::new(name, Element::Fire, 100, 10, 10, 10, ["Strike"])
    }

    #[test]
    fn accepts_consistent_definitions() {
        let catalog = Catalog::new([strike()], [template("Fyrox")]).unwrap();
        assert!(catalog.action("Strike").is_some());
        assert!(catalog.template("Fyrox").is_some());
    }

    #[test]
    fn pass_is_always_available() {
        let catalog = Catalog::new(Vec::new(), Vec::new()).unwrap();
        let pass = catalog.action("").unwrap();
        assert!(pass.is_pass());
    }

    #[test]
    fn rejects_duplicate_action_names() {
        let err = Catalog::new([strike(), strike()], Vec::new()).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateAction("Strike".into()));
    }

    #[test]
    fn rejects_the_reserved_pass_name() {
        let err = Catalog::new([ActionDef::pass()], Vec::new()).unwrap_err();
        assert_eq!(err, CatalogError::ReservedActionName);
    }

    #[test]
    fn rejects_duplicate_template_names() {
        let err = Catalog::new([strike()], [template("Fyrox"), template("Fyrox")]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateTemplate("Fyrox".into()));
    }

    #[test]
    fn rejects_dangling_action_references() {
        let err = Catalog::new(Vec::new(), [template("Fyrox")]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownActionReference {
                template: "Fyrox".into(),
                action: "Strike".into(),
            }
        );
    }

    #[test]
    fn rejects_zeroed_templates() {
        let broken = MonsterTemplate::new("Void", Element::Normal, 0, 10, 10, 10, ["Strike"]);
        let err = Catalog::new([strike()], [broken]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidTemplate {
                template: "Void".into(),
                field: "max health",
            }
        );
    }
}

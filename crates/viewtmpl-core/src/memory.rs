//! In-memory host model
//!
//! An owned, immutable-after-build implementation of [`Template`] and
//! [`DocumentContext`]. The snapshot store hydrates into it and the tests
//! build fixtures with it.

use crate::errors::{Result, TemplateError};
use crate::model::{
    Category, DocumentContext, ElementId, FieldId, FieldValue, NamedFilter, OverrideRecord,
    PlanRange, Template, ViewKind,
};
use std::collections::{BTreeMap, BTreeSet};

/// One filter applied by a template
#[derive(Debug, Clone, PartialEq)]
pub struct FilterApplication {
    pub filter: ElementId,
    pub overrides: OverrideRecord,
    pub hidden: bool,
}

/// A template held in memory
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryTemplate {
    id: ElementId,
    name: String,
    view_kind: ViewKind,
    allows_graphics_overrides: bool,
    controlled: BTreeSet<FieldId>,
    values: BTreeMap<FieldId, FieldValue>,
    category_overrides: BTreeMap<ElementId, OverrideRecord>,
    hidden_categories: BTreeSet<ElementId>,
    filters: Vec<FilterApplication>,
    plan_range: Option<PlanRange>,
}

impl MemoryTemplate {
    /// Create a template controlling nothing
    ///
    /// Schedules do not support graphics overrides; every other kind does
    /// until told otherwise.
    pub fn new(id: ElementId, name: impl Into<String>, view_kind: ViewKind) -> Self {
        Self {
            id,
            name: name.into(),
            view_kind,
            allows_graphics_overrides: view_kind != ViewKind::Schedule,
            controlled: BTreeSet::new(),
            values: BTreeMap::new(),
            category_overrides: BTreeMap::new(),
            hidden_categories: BTreeSet::new(),
            filters: Vec::new(),
            plan_range: None,
        }
    }

    pub fn allow_graphics_overrides(mut self, allowed: bool) -> Self {
        self.allows_graphics_overrides = allowed;
        self
    }

    /// Add `field` to the controlled set without giving it a value
    pub fn control(mut self, field: FieldId) -> Self {
        self.controlled.insert(field);
        self
    }

    /// Store a value without controlling the field
    pub fn with_value(mut self, field: FieldId, value: FieldValue) -> Self {
        self.values.insert(field, value);
        self
    }

    /// Control `field` and store its value
    pub fn controlled_value(self, field: FieldId, value: FieldValue) -> Self {
        self.control(field).with_value(field, value)
    }

    pub fn with_category_overrides(mut self, category: ElementId, overrides: OverrideRecord) -> Self {
        self.category_overrides.insert(category, overrides);
        self
    }

    pub fn hide_category(mut self, category: ElementId) -> Self {
        self.hidden_categories.insert(category);
        self
    }

    /// Apply a filter; re-applying the same filter replaces its settings
    pub fn apply_filter(mut self, filter: ElementId, overrides: OverrideRecord, hidden: bool) -> Self {
        self.filters.retain(|f| f.filter != filter);
        self.filters.push(FilterApplication {
            filter,
            overrides,
            hidden,
        });
        self
    }

    pub fn with_plan_range(mut self, range: PlanRange) -> Self {
        self.plan_range = Some(range);
        self
    }
}

impl Template for MemoryTemplate {
    fn id(&self) -> ElementId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn view_kind(&self) -> ViewKind {
        self.view_kind
    }

    fn allows_graphics_overrides(&self) -> bool {
        self.allows_graphics_overrides
    }

    fn controls(&self, field: FieldId) -> bool {
        self.controlled.contains(&field)
    }

    fn field_value(&self, field: FieldId) -> Option<FieldValue> {
        self.values.get(&field).cloned()
    }

    fn category_overrides(&self, category: ElementId) -> Option<OverrideRecord> {
        Some(
            self.category_overrides
                .get(&category)
                .cloned()
                .unwrap_or_default(),
        )
    }

    fn category_hidden(&self, category: ElementId) -> bool {
        self.hidden_categories.contains(&category)
    }

    fn filter_ids(&self) -> Vec<ElementId> {
        self.filters.iter().map(|f| f.filter).collect()
    }

    fn filter_overrides(&self, filter: ElementId) -> Option<OverrideRecord> {
        self.filters
            .iter()
            .find(|f| f.filter == filter)
            .map(|f| f.overrides.clone())
    }

    fn filter_hidden(&self, filter: ElementId) -> bool {
        self.filters
            .iter()
            .find(|f| f.filter == filter)
            .is_some_and(|f| f.hidden)
    }

    fn plan_range(&self) -> Option<PlanRange> {
        if self.view_kind.is_plan() {
            self.plan_range
        } else {
            None
        }
    }
}

/// A document: element names, category and filter catalogs, templates
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    name: String,
    elements: BTreeMap<ElementId, String>,
    categories: Vec<Category>,
    filters: BTreeMap<ElementId, NamedFilter>,
    templates: Vec<MemoryTemplate>,
}

impl MemoryDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a named element that fields may reference
    pub fn add_element(&mut self, id: ElementId, name: impl Into<String>) {
        self.elements.insert(id, name.into());
    }

    pub fn add_category(&mut self, category: Category) {
        self.categories.retain(|c| c.id != category.id);
        self.categories.push(category);
    }

    pub fn add_filter(&mut self, filter: NamedFilter) {
        self.filters.insert(filter.id, filter);
    }

    /// Add a template
    ///
    /// # Errors
    /// * `DuplicateTemplateId` - a template with the same id already exists
    pub fn add_template(&mut self, template: MemoryTemplate) -> Result<()> {
        if self.templates.iter().any(|t| t.id == template.id) {
            return Err(TemplateError::DuplicateTemplateId {
                id: template.id.value(),
            });
        }
        self.templates.push(template);
        Ok(())
    }

    pub fn templates(&self) -> &[MemoryTemplate] {
        &self.templates
    }

    /// Templates ordered by name, optionally restricted to one view kind
    pub fn list_templates(&self, kind: Option<ViewKind>) -> Vec<&MemoryTemplate> {
        let mut listed: Vec<&MemoryTemplate> = self
            .templates
            .iter()
            .filter(|t| kind.map_or(true, |k| t.view_kind == k))
            .collect();
        listed.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        listed
    }

    /// Find a template by exact name
    ///
    /// # Errors
    /// * `TemplateNotFound` - no template has this name
    /// * `AmbiguousTemplateName` - more than one template has this name
    pub fn find_template(&self, name: &str) -> Result<&MemoryTemplate> {
        let matches: Vec<&MemoryTemplate> =
            self.templates.iter().filter(|t| t.name == name).collect();
        match matches.as_slice() {
            [] => Err(TemplateError::TemplateNotFound {
                name: name.to_string(),
            }),
            [single] => Ok(single),
            many => Err(TemplateError::AmbiguousTemplateName {
                name: name.to_string(),
                count: many.len(),
            }),
        }
    }

    /// Resolve two names into two distinct templates
    ///
    /// # Errors
    /// * `TemplateNotFound` / `AmbiguousTemplateName` - see [`Self::find_template`]
    /// * `SameTemplate` - both names resolve to the same template
    pub fn select_pair(
        &self,
        first: &str,
        second: &str,
    ) -> Result<(&MemoryTemplate, &MemoryTemplate)> {
        let t1 = self.find_template(first)?;
        let t2 = self.find_template(second)?;
        if t1.id == t2.id {
            return Err(TemplateError::SameTemplate {
                name: t1.name.clone(),
            });
        }
        Ok((t1, t2))
    }
}

impl DocumentContext for MemoryDocument {
    fn element_name(&self, id: ElementId) -> Option<String> {
        self.elements.get(&id).cloned()
    }

    fn categories(&self) -> Vec<Category> {
        self.categories.clone()
    }

    fn filter(&self, id: ElementId) -> Option<NamedFilter> {
        self.filters.get(&id).cloned()
    }
}

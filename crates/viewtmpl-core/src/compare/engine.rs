//! Comparison engine: runs the passes over a pair of templates.
//!
//! The core entry point is [`ComparisonEngine::compare`], which consumes the
//! engine and returns the ordered records.

use crate::compare::accessor::FieldAccessor;
use crate::compare::overrides::overrides_equal;
use crate::compare::record::DiffRecord;
use crate::labels::Labels;
use crate::model::{
    Category, CategoryKind, DocumentContext, FieldId, NamedFilter, OverrideRecord, Template,
};
use crate::{log_op_end, log_op_start};
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::time::Instant;
use viewtmpl_core_types::schema::EVENT_PASS_SKIPPED;
use viewtmpl_core_types::RequestContext;

/// The comparison passes, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    General,
    ModelCategories,
    AnnotationCategories,
    Filters,
    ViewRange,
}

impl Pass {
    pub const ORDER: [Pass; 5] = [
        Pass::General,
        Pass::ModelCategories,
        Pass::AnnotationCategories,
        Pass::Filters,
        Pass::ViewRange,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pass::General => "general",
            Pass::ModelCategories => "model_categories",
            Pass::AnnotationCategories => "annotation_categories",
            Pass::Filters => "filters",
            Pass::ViewRange => "view_range",
        }
    }

    /// Group label every record of this pass carries
    pub fn group_label(self, labels: &Labels) -> &str {
        match self {
            Pass::General => &labels.group_general,
            Pass::ModelCategories => &labels.group_model_categories,
            Pass::AnnotationCategories => &labels.group_annotation_categories,
            Pass::Filters => &labels.group_filters,
            Pass::ViewRange => &labels.group_view_range,
        }
    }
}

/// Compares one pair of templates
///
/// Built per (document, template1, template2) and consumed by
/// [`compare`](Self::compare); nothing survives the call.
pub struct ComparisonEngine<'a> {
    doc: &'a dyn DocumentContext,
    template1: &'a dyn Template,
    template2: &'a dyn Template,
    labels: Cow<'a, Labels>,
    context: RequestContext,
}

impl<'a> ComparisonEngine<'a> {
    pub fn new(
        doc: &'a dyn DocumentContext,
        template1: &'a dyn Template,
        template2: &'a dyn Template,
    ) -> Self {
        Self {
            doc,
            template1,
            template2,
            labels: Cow::Owned(Labels::default()),
            context: RequestContext::new(),
        }
    }

    pub fn with_labels(mut self, labels: &'a Labels) -> Self {
        self.labels = Cow::Borrowed(labels);
        self
    }

    /// Attach the caller's request context; its id tags every log event
    pub fn with_context(mut self, context: RequestContext) -> Self {
        self.context = context;
        self
    }

    /// Run every pass and return the records in pass order
    pub fn compare(self) -> Vec<DiffRecord> {
        let start = Instant::now();
        log_op_start!(
            "compare",
            request_id = %self.context.request_id,
            template1 = self.template1.name(),
            template2 = self.template2.name()
        );

        let mut results = Vec::new();
        for pass in Pass::ORDER {
            self.run_pass(pass, &mut results);
        }

        let difference_count = results.iter().filter(|r| r.is_different()).count();
        log_op_end!(
            "compare",
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = %self.context.request_id,
            record_count = results.len() as u64,
            difference_count = difference_count as u64
        );
        results
    }

    fn run_pass(&self, pass: Pass, results: &mut Vec<DiffRecord>) {
        match pass {
            Pass::General => self.compare_general(results),
            Pass::ModelCategories => self.compare_category_overrides(CategoryKind::Model, results),
            Pass::AnnotationCategories => {
                self.compare_category_overrides(CategoryKind::Annotation, results)
            }
            Pass::Filters => self.compare_filters(results),
            Pass::ViewRange => self.compare_view_range(results),
        }
    }

    fn skip(&self, pass: Pass, reason: &str) {
        tracing::debug!(
            component = module_path!(),
            op = "compare",
            event = EVENT_PASS_SKIPPED,
            request_id = %self.context.request_id,
            pass = pass.name(),
            reason = reason
        );
    }

    /// Check that both templates control the group field `field`
    ///
    /// When they do not, the single summary row is recorded and `false`
    /// returned: neither side controlling gives `not controlled` twice, one
    /// side controlling gives `controlled` against `not controlled`.
    fn both_control(
        &self,
        results: &mut Vec<DiffRecord>,
        pass: Pass,
        parameter: &str,
        field: FieldId,
    ) -> bool {
        let c1 = self.template1.controls(field);
        let c2 = self.template2.controls(field);
        if c1 && c2 {
            return true;
        }

        let labels = &*self.labels;
        results.push(DiffRecord::new(
            pass.group_label(labels),
            parameter,
            labels.control_state(c1),
            labels.control_state(c2),
        ));
        self.skip(pass, "group field not controlled by both templates");
        false
    }

    fn compare_general(&self, results: &mut Vec<DiffRecord>) {
        let labels = &*self.labels;
        let accessor = FieldAccessor::new(self.doc, labels);
        let group = Pass::General.group_label(labels);

        let fields = [
            (&labels.view_scale, FieldId::ViewScale),
            (&labels.detail_level, FieldId::DetailLevel),
            (&labels.graphics_style, FieldId::GraphicsStyle),
            (&labels.discipline, FieldId::Discipline),
        ];
        for (parameter, field) in fields {
            results.push(DiffRecord::new(
                group,
                parameter.as_str(),
                accessor.resolve_field(self.template1, field),
                accessor.resolve_field(self.template2, field),
            ));
        }
    }

    fn compare_category_overrides(&self, kind: CategoryKind, results: &mut Vec<DiffRecord>) {
        let (pass, field) = match kind {
            CategoryKind::Model => (Pass::ModelCategories, FieldId::ModelCategoryOverrides),
            CategoryKind::Annotation => (
                Pass::AnnotationCategories,
                FieldId::AnnotationCategoryOverrides,
            ),
        };

        if !self.template1.allows_graphics_overrides()
            || !self.template2.allows_graphics_overrides()
        {
            self.skip(pass, "graphics overrides not allowed");
            return;
        }

        let labels = &*self.labels;
        if !self.both_control(results, pass, &labels.all_overrides, field) {
            return;
        }

        let mut categories: Vec<Category> = self
            .doc
            .categories()
            .into_iter()
            .filter(|c| c.kind == kind && c.allows_bound_parameters)
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        let group = pass.group_label(labels);
        for category in &categories {
            let ov1 = self.template1.category_overrides(category.id);
            let ov2 = self.template2.category_overrides(category.id);
            let hidden1 = self.template1.category_hidden(category.id);
            let hidden2 = self.template2.category_hidden(category.id);

            if hidden1 == hidden2 && overrides_equal(ov1.as_ref(), ov2.as_ref()) {
                continue;
            }

            let name = category.name.as_str();
            results.push(DiffRecord::new(
                group,
                labels.category_param(name, &labels.visibility),
                labels.bool_text(!hidden1),
                labels.bool_text(!hidden2),
            ));
            results.push(DiffRecord::new(
                group,
                labels.category_param(name, &labels.halftone),
                self.halftone_text(ov1.as_ref()),
                self.halftone_text(ov2.as_ref()),
            ));
            results.push(DiffRecord::new(
                group,
                labels.category_param(name, &labels.line_weight),
                self.line_weight_text(ov1.as_ref()),
                self.line_weight_text(ov2.as_ref()),
            ));
            results.push(DiffRecord::new(
                group,
                labels.category_param(name, &labels.line_color),
                self.line_color_text(ov1.as_ref()),
                self.line_color_text(ov2.as_ref()),
            ));
        }
    }

    fn compare_filters(&self, results: &mut Vec<DiffRecord>) {
        let labels = &*self.labels;
        if !self.both_control(results, Pass::Filters, &labels.filter_application, FieldId::Filters) {
            return;
        }

        let filters1 = self.applied_filters(self.template1);
        let filters2 = self.applied_filters(self.template2);
        let names: BTreeSet<&str> = filters1
            .iter()
            .chain(filters2.iter())
            .map(|f| f.name.as_str())
            .collect();

        let group = Pass::Filters.group_label(labels);
        for name in names {
            let f1 = filters1.iter().find(|f| f.name == name);
            let f2 = filters2.iter().find(|f| f.name == name);

            match (f1, f2) {
                (Some(_), None) => results.push(DiffRecord::new(
                    group,
                    labels.filter_param(name),
                    labels.applied.as_str(),
                    labels.absent.as_str(),
                )),
                (None, Some(_)) => results.push(DiffRecord::new(
                    group,
                    labels.filter_param(name),
                    labels.absent.as_str(),
                    labels.applied.as_str(),
                )),
                (Some(f1), Some(f2)) => {
                    let ov1 = self.template1.filter_overrides(f1.id);
                    let ov2 = self.template2.filter_overrides(f2.id);
                    let hidden1 = self.template1.filter_hidden(f1.id);
                    let hidden2 = self.template2.filter_hidden(f2.id);

                    if hidden1 == hidden2 && overrides_equal(ov1.as_ref(), ov2.as_ref()) {
                        continue;
                    }

                    results.push(DiffRecord::new(
                        group,
                        labels.filter_attr(name, &labels.visibility),
                        labels.bool_text(!hidden1),
                        labels.bool_text(!hidden2),
                    ));
                    results.push(DiffRecord::new(
                        group,
                        labels.filter_attr(name, &labels.halftone),
                        self.halftone_text(ov1.as_ref()),
                        self.halftone_text(ov2.as_ref()),
                    ));
                    results.push(DiffRecord::new(
                        group,
                        labels.filter_attr(name, &labels.line_color),
                        self.line_color_text(ov1.as_ref()),
                        self.line_color_text(ov2.as_ref()),
                    ));
                }
                (None, None) => {}
            }
        }
    }

    /// All four rows are emitted whenever the pass is reachable, equal or not.
    fn compare_view_range(&self, results: &mut Vec<DiffRecord>) {
        if !self.template1.view_kind().is_plan() || !self.template2.view_kind().is_plan() {
            self.skip(Pass::ViewRange, "not a pair of plan templates");
            return;
        }

        let labels = &*self.labels;
        if !self.both_control(results, Pass::ViewRange, &labels.range_settings, FieldId::ViewRange)
        {
            return;
        }

        let (Some(r1), Some(r2)) = (self.template1.plan_range(), self.template2.plan_range())
        else {
            self.skip(Pass::ViewRange, "view range data unavailable");
            return;
        };

        let group = Pass::ViewRange.group_label(labels);
        let planes = [
            (&labels.top_offset, r1.top_clip, r2.top_clip),
            (&labels.cut_offset, r1.cut_plane, r2.cut_plane),
            (&labels.bottom_offset, r1.bottom_clip, r2.bottom_clip),
            (&labels.depth_offset, r1.view_depth, r2.view_depth),
        ];
        for (parameter, v1, v2) in planes {
            results.push(DiffRecord::new(
                group,
                parameter.as_str(),
                v1.to_string(),
                v2.to_string(),
            ));
        }
    }

    /// Filters applied by `template`, resolved through the document; unknown ids are dropped
    fn applied_filters(&self, template: &dyn Template) -> Vec<NamedFilter> {
        template
            .filter_ids()
            .into_iter()
            .filter_map(|id| {
                let resolved = self.doc.filter(id);
                if resolved.is_none() {
                    tracing::debug!(
                        component = module_path!(),
                        request_id = %self.context.request_id,
                        template = template.name(),
                        filter_id = id.value(),
                        "applied filter not resolvable, dropped"
                    );
                }
                resolved
            })
            .collect()
    }

    fn halftone_text(&self, overrides: Option<&OverrideRecord>) -> String {
        overrides.map_or_else(
            || self.labels.no_value.clone(),
            |o| self.labels.bool_text(o.halftone),
        )
    }

    fn line_weight_text(&self, overrides: Option<&OverrideRecord>) -> String {
        overrides.map_or_else(
            || self.labels.no_value.clone(),
            |o| self.labels.line_weight_text(o.projection_line_weight),
        )
    }

    fn line_color_text(&self, overrides: Option<&OverrideRecord>) -> String {
        overrides.map_or_else(
            || self.labels.no_value.clone(),
            |o| self.labels.color(o.projection_line_color),
        )
    }
}

/// Compare two templates with the default (English) labels
pub fn compare_templates(
    doc: &dyn DocumentContext,
    template1: &dyn Template,
    template2: &dyn Template,
) -> Vec<DiffRecord> {
    ComparisonEngine::new(doc, template1, template2).compare()
}

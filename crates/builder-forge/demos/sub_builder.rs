//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Builder for `Sub`
//! Source: fixtures/hierarchy.json
//! Generated by `builder-forge`

use crate::domain::Gadget;
use crate::domain::GadgetBuilder;
use crate::domain::Sub;
use std::collections::BTreeSet;
/// Fluent builder for `Sub`.
///
/// `build` writes only the fields whose setter was called, so values of a seeded instance survive.
pub struct SubBuilder {
    result: Sub,
    here_in_sub: Option<String>,
    there_in_sub: Option<String>,
    list: Option<Vec<String>>,
    some_char: char,
    there_in_base: Option<i32>,
    here_in_base: Option<String>,
    ratio: f64,
    gadget: Option<Gadget>,
    fields_to_set: BTreeSet<&'static str>,
}
impl SubBuilder {
    /// Creates a builder holding zero-equivalents for every field.
    #[must_use]
    pub fn create() -> Self {
        Self {
            result: Sub::default(),
            here_in_sub: None,
            there_in_sub: None,
            list: None,
            some_char: '\0',
            there_in_base: None,
            here_in_base: None,
            ratio: 0f64,
            gadget: None,
            fields_to_set: BTreeSet::new(),
        }
    }
    /// Sets `Sub::here`.
    pub fn with_here_in_sub(mut self, here_in_sub: impl Into<Option<String>>) -> Self {
        self.here_in_sub = here_in_sub.into();
        self.fields_to_set.insert("here_in_sub");
        self
    }
    /// Sets `Sub::there`.
    pub fn with_there_in_sub(mut self, there_in_sub: impl Into<Option<String>>) -> Self {
        self.there_in_sub = there_in_sub.into();
        self.fields_to_set.insert("there_in_sub");
        self
    }
    /// Sets `Sub::list`, `Sub::some_char`, `Base::there`, `Base::ratio`, `Base::gadget`, selected by the argument type.
    pub fn with<A: SubBuilderWithArg>(mut self, arg: A) -> Self {
        arg.apply(&mut self);
        self
    }
    /// Sets `Base::here`.
    pub fn with_here_in_base(mut self, here_in_base: impl Into<Option<String>>) -> Self {
        self.here_in_base = here_in_base.into();
        self.fields_to_set.insert("here_in_base");
        self
    }
    /// Sets every field to its zero-equivalent: `0`, `false` or `'\0'` for scalars, `None` for everything else.
    #[must_use]
    pub fn clear(self) -> Self {
        self.with_here_in_sub(None::<String>)
            .with_there_in_sub(None::<String>)
            .with(None::<Vec<String>>)
            .with('\0')
            .with(None::<i32>)
            .with_here_in_base(None::<String>)
            .with(0f64)
            .with(None::<Gadget>)
    }
    /// Continues building from an existing instance.
    ///
    /// Stored values are cleared and only fields set after this call are written by `build`.
    /// Passing `None` leaves the builder unchanged.
    #[must_use]
    pub fn starting_from(mut self, instance: impl Into<Option<Sub>>) -> Self {
        if let Some(instance) = instance.into() {
            self = self.clear();
            self.fields_to_set.clear();
            self.result = instance;
        }
        self
    }
    /// Writes the stored fields into the result and returns it.
    pub fn build(self) -> Sub {
        let mut result = self.result;
        if self.fields_to_set.contains("here_in_sub") {
            result.here = self.here_in_sub;
        }
        if self.fields_to_set.contains("there_in_sub") {
            result.there = self.there_in_sub;
        }
        if self.fields_to_set.contains("list") {
            result.list = self.list;
        }
        if self.fields_to_set.contains("some_char") {
            result.some_char = self.some_char;
        }
        if self.fields_to_set.contains("there_in_base") {
            result.base.there = self.there_in_base;
        }
        if self.fields_to_set.contains("here_in_base") {
            result.base.here = self.here_in_base;
        }
        if self.fields_to_set.contains("ratio") {
            result.base.ratio = self.ratio;
        }
        if self.fields_to_set.contains("gadget") {
            result.base.gadget = self.gadget;
        }
        result
    }
}
impl Default for SubBuilder {
    fn default() -> Self {
        Self::create()
    }
}
/// Argument types accepted by `SubBuilder::with`.
pub trait SubBuilderWithArg {
    /// Stores the argument in the builder slot it belongs to.
    fn apply(self, builder: &mut SubBuilder);
}
impl SubBuilderWithArg for Option<Vec<String>> {
    fn apply(self, builder: &mut SubBuilder) {
        builder.list = self;
        builder.fields_to_set.insert("list");
    }
}
impl SubBuilderWithArg for char {
    fn apply(self, builder: &mut SubBuilder) {
        builder.some_char = self;
        builder.fields_to_set.insert("some_char");
    }
}
impl SubBuilderWithArg for Option<i32> {
    fn apply(self, builder: &mut SubBuilder) {
        builder.there_in_base = self;
        builder.fields_to_set.insert("there_in_base");
    }
}
impl SubBuilderWithArg for f64 {
    fn apply(self, builder: &mut SubBuilder) {
        builder.ratio = self;
        builder.fields_to_set.insert("ratio");
    }
}
impl SubBuilderWithArg for Option<Gadget> {
    fn apply(self, builder: &mut SubBuilder) {
        builder.gadget = self;
        builder.fields_to_set.insert("gadget");
    }
}
impl SubBuilderWithArg for GadgetBuilder {
    fn apply(self, builder: &mut SubBuilder) {
        builder.gadget = Some(self.build());
        builder.fields_to_set.insert("gadget");
    }
}
impl SubBuilderWithArg for Vec<String> {
    fn apply(self, builder: &mut SubBuilder) {
        builder.list = Some(self);
        builder.fields_to_set.insert("list");
    }
}
impl SubBuilderWithArg for i32 {
    fn apply(self, builder: &mut SubBuilder) {
        builder.there_in_base = Some(self);
        builder.fields_to_set.insert("there_in_base");
    }
}
impl SubBuilderWithArg for Gadget {
    fn apply(self, builder: &mut SubBuilder) {
        builder.gadget = Some(self);
        builder.fields_to_set.insert("gadget");
    }
}

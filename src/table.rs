//! The built method table handed to the dispatcher.
//!
//! A [`MethodTable`] holds at most one [`Method`] per [`Verb`], each in a slot
//! typed with that verb's handler signature. Tables are produced by
//! [`MethodBuilder::build`](crate::MethodBuilder::build) and cannot be changed
//! afterwards.

use crate::batch::BatchConfig;
use crate::builder::MethodBuilder;
use crate::method::{
    DeleteHandler, ErrorMapping, GetAllHandler, GetHandler, Method, PostHandler, UpdateHandler,
    Verb,
};
use std::fmt;

/// Per-verb handlers and their error mappings for one resource type.
///
/// `In` is the request body type, `Out` the resource representation and `Id`
/// the resource identifier.
pub struct MethodTable<In, Out, Id> {
    pub(crate) get: Option<Method<GetHandler<Out, Id>>>,
    pub(crate) get_all: Option<Method<GetAllHandler<Out>>>,
    pub(crate) post: Option<Method<PostHandler<In, Id>>>,
    pub(crate) put: Option<Method<UpdateHandler<In, Id>>>,
    pub(crate) patch: Option<Method<UpdateHandler<In, Id>>>,
    pub(crate) delete: Option<Method<DeleteHandler<Id>>>,
    pub(crate) config: BatchConfig,
}

impl<In, Out, Id> MethodTable<In, Out, Id> {
    /// Start registering handlers.
    pub fn builder() -> MethodBuilder<In, Out, Id> {
        MethodBuilder::new()
    }

    pub(crate) fn empty() -> Self {
        Self {
            get: None,
            get_all: None,
            post: None,
            put: None,
            patch: None,
            delete: None,
            config: BatchConfig::default(),
        }
    }

    pub fn get(&self) -> Option<&Method<GetHandler<Out, Id>>> {
        self.get.as_ref()
    }

    pub fn get_all(&self) -> Option<&Method<GetAllHandler<Out>>> {
        self.get_all.as_ref()
    }

    pub fn post(&self) -> Option<&Method<PostHandler<In, Id>>> {
        self.post.as_ref()
    }

    pub fn put(&self) -> Option<&Method<UpdateHandler<In, Id>>> {
        self.put.as_ref()
    }

    pub fn patch(&self) -> Option<&Method<UpdateHandler<In, Id>>> {
        self.patch.as_ref()
    }

    pub fn delete(&self) -> Option<&Method<DeleteHandler<Id>>> {
        self.delete.as_ref()
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Whether a handler is registered for `verb`.
    pub fn contains(&self, verb: Verb) -> bool {
        self.error_mappings(verb).is_some()
    }

    /// Registered verbs in table order.
    pub fn verbs(&self) -> Vec<Verb> {
        Verb::ALL
            .into_iter()
            .filter(|verb| self.contains(*verb))
            .collect()
    }

    /// Error mappings of the method registered for `verb`.
    pub fn error_mappings(&self, verb: Verb) -> Option<&[ErrorMapping]> {
        match verb {
            Verb::Get => self.get.as_ref().map(Method::error_mappings),
            Verb::GetAll => self.get_all.as_ref().map(Method::error_mappings),
            Verb::Post => self.post.as_ref().map(Method::error_mappings),
            Verb::Put => self.put.as_ref().map(Method::error_mappings),
            Verb::Patch => self.patch.as_ref().map(Method::error_mappings),
            Verb::Delete => self.delete.as_ref().map(Method::error_mappings),
        }
    }

    pub fn len(&self) -> usize {
        self.verbs().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<In, Out, Id> Clone for MethodTable<In, Out, Id> {
    fn clone(&self) -> Self {
        Self {
            get: self.get.clone(),
            get_all: self.get_all.clone(),
            post: self.post.clone(),
            put: self.put.clone(),
            patch: self.patch.clone(),
            delete: self.delete.clone(),
            config: self.config.clone(),
        }
    }
}

impl<In, Out, Id> fmt::Debug for MethodTable<In, Out, Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for verb in self.verbs() {
            map.entry(&verb, &self.error_mappings(verb));
        }
        map.finish()
    }
}

//! Registry type decoder.
//!
//! Maps a registry type id to the TypeScript text used for it in generated
//! sources. Named composites and variants decode to their declared name;
//! everything else is rendered inline.

use crate::error::SchemaError;
use crate::ir::{ResolvedType, to_pascal_case};
use crate::types::{Field, TypeDef, TypeInfo, TypeRegistry, VariantDef};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Maximum depth of nested anonymous types rendered inline.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Decoder for one document's type registry.
#[derive(Debug, Clone)]
pub struct TypeDecoder<'a> {
    registry: TypeRegistry<'a>,
    names: HashMap<u32, String>,
    declared: Vec<u32>,
}

impl<'a> TypeDecoder<'a> {
    /// Creates a decoder and assigns declared names in registry order.
    #[must_use]
    pub fn new(registry: TypeRegistry<'a>) -> Self {
        let mut names = HashMap::new();
        let mut declared = Vec::new();
        let mut used = HashSet::new();

        for entry in registry.iter() {
            let Some(ident) = declared_ident(&entry.ty) else {
                continue;
            };
            let name = unique_name(to_pascal_case(ident), entry.id, &used);
            used.insert(name.clone());
            names.insert(entry.id, name);
            declared.push(entry.id);
        }

        Self {
            registry,
            names,
            declared,
        }
    }

    /// Returns the underlying registry.
    #[must_use]
    pub fn registry(&self) -> &TypeRegistry<'a> {
        &self.registry
    }

    /// Ids of declared composites and enums, in registry order.
    #[must_use]
    pub fn declared_ids(&self) -> &[u32] {
        &self.declared
    }

    /// Returns the declared name for an id, if it names a composite or enum.
    #[must_use]
    pub fn declared_name(&self, id: u32) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Decodes a type id into its textual representation.
    ///
    /// # Errors
    /// Returns `SchemaError::TypeNotFound` if the id, or any id it refers
    /// to, is absent from the registry, and `SchemaError::CircularReference`
    /// if an anonymous type contains itself, and
    /// `SchemaError::NestingTooDeep` if anonymous types nest deeper than
    /// [`MAX_NESTING_DEPTH`].
    pub fn decode(&self, id: u32) -> Result<ResolvedType, SchemaError> {
        let mut references = BTreeSet::new();
        let mut stack = Vec::new();
        let text = self.render(id, "type lookup", &mut references, &mut stack)?;
        Ok(ResolvedType {
            id,
            text,
            references,
        })
    }

    fn render(
        &self,
        id: u32,
        context: &str,
        references: &mut BTreeSet<String>,
        stack: &mut Vec<u32>,
    ) -> Result<String, SchemaError> {
        if let Some(name) = self.names.get(&id) {
            references.insert(name.clone());
            return Ok(name.clone());
        }

        let info = self
            .registry
            .get(id)
            .ok_or_else(|| SchemaError::type_not_found(id, context))?;

        if stack.contains(&id) {
            let mut path: Vec<String> = stack.iter().map(u32::to_string).collect();
            path.push(id.to_string());
            return Err(SchemaError::CircularReference {
                path: path.join(" -> "),
            });
        }

        if stack.len() >= MAX_NESTING_DEPTH {
            return Err(SchemaError::NestingTooDeep {
                id,
                limit: MAX_NESTING_DEPTH,
            });
        }

        stack.push(id);
        let inner_context = format!("type {id}");
        let ctx = inner_context.as_str();

        let text = match &info.def {
            TypeDef::Primitive(p) => p.ts_type().to_string(),
            TypeDef::Compact(c) => self.render(c.ty, ctx, references, stack)?,
            TypeDef::Sequence(s) => {
                format!("Array<{}>", self.render(s.ty, ctx, references, stack)?)
            }
            TypeDef::Array(a) => {
                format!("Array<{}>", self.render(a.ty, ctx, references, stack)?)
            }
            TypeDef::BitSequence(_) => "Array<boolean>".to_string(),
            TypeDef::Tuple(ids) if ids.is_empty() => "null".to_string(),
            TypeDef::Tuple(ids) => {
                let parts = ids
                    .iter()
                    .map(|&t| self.render(t, ctx, references, stack))
                    .collect::<Result<Vec<_>, _>>()?;
                format!("[{}]", parts.join(", "))
            }
            TypeDef::Composite(c) => self.render_fields(&c.fields, ctx, references, stack)?,
            TypeDef::Variant(v) => self.render_variant(info, v, ctx, references, stack)?,
        };

        stack.pop();
        Ok(text)
    }

    fn render_variant(
        &self,
        info: &TypeInfo,
        def: &VariantDef,
        context: &str,
        references: &mut BTreeSet<String>,
        stack: &mut Vec<u32>,
    ) -> Result<String, SchemaError> {
        if info.has_path(&["Option"]) {
            if let Some(some) = def.variant("Some").and_then(|v| v.fields.first()) {
                let inner = self.render(some.ty, context, references, stack)?;
                return Ok(format!("({inner} | null)"));
            }
        }

        if info.has_path(&["Result"]) {
            let ok = def.variant("Ok").and_then(|v| v.fields.first());
            let err = def.variant("Err").and_then(|v| v.fields.first());
            if let (Some(ok), Some(err)) = (ok, err) {
                let ok = self.render(ok.ty, context, references, stack)?;
                let err = self.render(err.ty, context, references, stack)?;
                return Ok(format!("({{ ok: {ok} }} | {{ err: {err} }})"));
            }
        }

        if def.variants.is_empty() {
            return Ok("never".to_string());
        }

        if def.is_unit_only() {
            let names: Vec<String> = def.variants.iter().map(|v| format!("'{}'", v.name)).collect();
            return Ok(format!("({})", names.join(" | ")));
        }

        let mut arms = Vec::with_capacity(def.variants.len());
        for variant in &def.variants {
            let payload = self.render_fields(&variant.fields, context, references, stack)?;
            arms.push(format!("{{ {}: {} }}", variant.name, payload));
        }
        Ok(format!("({})", arms.join(" | ")))
    }

    /// Renders a field list as an object literal, a tuple, a single type or
    /// `null`.
    fn render_fields(
        &self,
        fields: &[Field],
        context: &str,
        references: &mut BTreeSet<String>,
        stack: &mut Vec<u32>,
    ) -> Result<String, SchemaError> {
        if fields.is_empty() {
            return Ok("null".to_string());
        }

        let named = fields.iter().all(|f| f.name.is_some());
        let mut parts = Vec::with_capacity(fields.len());
        for field in fields {
            let ty = self.render(field.ty, context, references, stack)?;
            match &field.name {
                Some(name) if named => parts.push(format!("{name}: {ty}")),
                _ => parts.push(ty),
            }
        }

        Ok(if named {
            format!("{{ {} }}", parts.join("; "))
        } else if parts.len() == 1 {
            parts.remove(0)
        } else {
            format!("[{}]", parts.join(", "))
        })
    }
}

/// Picks a declared name not yet in `used`: the base name, then the base
/// suffixed with the type id, then a counter on top of that.
fn unique_name(base: String, id: u32, used: &HashSet<String>) -> String {
    if !used.contains(&base) {
        return base;
    }
    let mut name = format!("{base}{id}");
    let mut n = 1;
    while used.contains(&name) {
        name = format!("{base}{id}_{n}");
        n += 1;
    }
    name
}

/// Returns the identifier a registry type is declared under, or `None` if it
/// is rendered inline.
fn declared_ident(info: &TypeInfo) -> Option<&str> {
    if !(info.def.is_composite() || info.def.is_variant()) {
        return None;
    }
    if info.has_path(&["Option"]) || info.has_path(&["Result"]) {
        return None;
    }
    info.ident()
}

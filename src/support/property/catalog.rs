mod builtin;

use std::collections::BTreeMap;

use super::{
    EquationType, PropertyError, PropertyKind, PropertyLookup, PropertyRecord, PropertySpec,
    TemperatureRange,
};

/// A material and its named property fits.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    id: String,
    name: String,
    properties: BTreeMap<String, PropertySpec>,
}

impl Material {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Adds or replaces a property, returning the updated material.
    #[must_use]
    pub fn with_property(mut self, property: impl Into<String>, spec: PropertySpec) -> Self {
        self.properties.insert(property.into(), spec);
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn property(&self, property: &str) -> Option<&PropertySpec> {
        self.properties.get(property)
    }

    /// Property names in sorted order.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }
}

/// Description of one property entry in a [`MaterialSummary`].
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySummary {
    pub name: String,
    pub equation: EquationType,
    pub range: TemperatureRange,
    pub units: String,
}

/// Overview of a material's available data.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialSummary {
    pub id: String,
    pub name: String,
    pub properties: Vec<PropertySummary>,
}

/// In-memory material catalog.
///
/// Materials are kept in id order, so iteration and listings are
/// deterministic. Mutation takes `&mut self`; calculations borrow the
/// catalog shared, so the two cannot overlap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialCatalog {
    materials: BTreeMap<String, Material>,
}

impl MaterialCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding the built-in NIST cryogenic fits.
    ///
    /// | id | material |
    /// |----|----------|
    /// | `aluminum_6061_t6` | Aluminum 6061-T6 |
    /// | `copper_ofhc_rrr{50,100,150,300,500}` | OFHC copper by residual resistivity ratio |
    /// | `stainless_steel_304` | Stainless steel 304 |
    /// | `fiberglass_epoxy_g10` | G-10 fiberglass epoxy, `_normal` and `_wrap` variants |
    #[must_use]
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    /// Adds a material, replacing and returning any with the same id.
    pub fn insert(&mut self, material: Material) -> Option<Material> {
        self.materials.insert(material.id.clone(), material)
    }

    /// Adds or replaces one property, creating the material if needed.
    ///
    /// An existing material keeps its name.
    pub fn insert_spec(
        &mut self,
        id: &str,
        name: &str,
        property: impl Into<String>,
        spec: PropertySpec,
    ) {
        self.materials
            .entry(id.to_owned())
            .or_insert_with(|| Material::new(id, name))
            .properties
            .insert(property.into(), spec);
    }

    /// Validates a loosely-typed record and stores it.
    ///
    /// # Errors
    ///
    /// Returns the validation error from the record conversion; the catalog
    /// is left unchanged in that case.
    pub fn insert_record(
        &mut self,
        id: &str,
        name: &str,
        property: impl Into<String>,
        record: PropertyRecord,
    ) -> Result<(), PropertyError> {
        let spec = PropertySpec::try_from(record)?;
        self.insert_spec(id, name, property, spec);
        Ok(())
    }

    /// Returns a material by id.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::MaterialNotFound`] if the id is unknown.
    pub fn material(&self, id: &str) -> Result<&Material, PropertyError> {
        self.materials
            .get(id)
            .ok_or_else(|| PropertyError::MaterialNotFound {
                material: id.to_owned(),
            })
    }

    /// Material ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.materials.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Summarizes a material's properties.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::MaterialNotFound`] if the id is unknown.
    pub fn summary(&self, id: &str) -> Result<MaterialSummary, PropertyError> {
        let material = self.material(id)?;
        let properties = material
            .properties
            .iter()
            .map(|(name, spec)| PropertySummary {
                name: name.clone(),
                equation: spec.equation_type(),
                range: spec.range(),
                units: spec.units().to_owned(),
            })
            .collect();

        Ok(MaterialSummary {
            id: material.id.clone(),
            name: material.name.clone(),
            properties,
        })
    }

    /// Ids of materials with `kind` or any of its variants.
    #[must_use]
    pub fn materials_with_property(&self, kind: PropertyKind) -> Vec<&str> {
        self.materials
            .values()
            .filter(|material| material.property_names().any(|name| kind.matches(name)))
            .map(Material::id)
            .collect()
    }

    /// Returns `true` if `property` of `id` exists.
    ///
    /// Stored specs are validated on insertion, so existence is enough.
    #[must_use]
    pub fn is_valid(&self, id: &str, property: &str) -> bool {
        self.property(id, property).is_ok()
    }
}

impl PropertyLookup for MaterialCatalog {
    fn property(&self, material: &str, property: &str) -> Result<&PropertySpec, PropertyError> {
        let entry = self.material(material)?;
        entry
            .property(property)
            .ok_or_else(|| PropertyError::PropertyNotFound {
                material: material.to_owned(),
                property: property.to_owned(),
                available: entry.property_names().map(str::to_owned).collect(),
            })
    }

    fn material_name(&self, material: &str) -> Option<&str> {
        self.materials.get(material).map(Material::name)
    }
}

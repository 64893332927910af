use std::slice::Iter;

use crate::Span;

use super::{expressions::Expr, statements::Stmt};

/// Compilation unit handed to the bytecode generator.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub name: String,
    pub root_space: SpaceDeclaration,
    pub span: Span,
}

impl Module {
    /// All classes declared in the root space, in source order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDeclaration> {
        self.root_space.iter().map(|declaration| match declaration {
            TypeDeclaration::Class(class) => class,
        })
    }
}

/// Index of a space in a space table.
///
/// Used for the non-owning link from a space to its parent; the tree itself
/// never holds a second owner of a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpaceId(pub usize);

/// Namespace declaration. `name` is dotted, e.g. `App.Models`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceDeclaration {
    pub name: String,
    pub declarations: Vec<TypeDeclaration>,
    pub parent: Option<SpaceId>,
    pub span: Span,
}

impl SpaceDeclaration {
    pub fn iter(&self) -> Iter<'_, TypeDeclaration> {
        self.declarations.iter()
    }

    /// The dotted name split into its nesting levels.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.name.split('.')
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeDeclaration {
    Class(ClassDeclaration),
}

impl TypeDeclaration {
    pub fn name(&self) -> &str {
        match self {
            TypeDeclaration::Class(class) => &class.name,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            TypeDeclaration::Class(class) => &class.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDeclaration {
    pub name: String,
    pub members: Vec<Member>,
    pub span: Span,
}

impl ClassDeclaration {
    pub fn methods(&self) -> impl Iterator<Item = &MethodDeclaration> {
        self.members.iter().filter_map(|member| match member {
            Member::Method(method) => Some(method),
            _ => None,
        })
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDeclaration> {
        self.members.iter().filter_map(|member| match member {
            Member::Field(field) => Some(field),
            _ => None,
        })
    }

    pub fn properties(&self) -> impl Iterator<Item = &PropertyDeclaration> {
        self.members.iter().filter_map(|member| match member {
            Member::Property(property) => Some(property),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Method(MethodDeclaration),
    Field(FieldDeclaration),
    Property(PropertyDeclaration),
}

impl Member {
    pub fn name(&self) -> &str {
        match self {
            Member::Method(method) => &method.name,
            Member::Field(field) => &field.name,
            Member::Property(property) => &property.name,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Member::Method(method) => &method.span,
            Member::Field(field) => &field.span,
            Member::Property(property) => &property.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub type_name: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDeclaration {
    pub name: String,
    pub return_type: String,
    pub parameters: Vec<Parameter>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDeclaration {
    pub name: String,
    pub type_name: String,
    pub initializer: Option<Expr>,
    pub span: Span,
}

/// Property with auto accessors. At most one `get` and one `set`.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDeclaration {
    pub name: String,
    pub type_name: String,
    pub has_getter: bool,
    pub has_setter: bool,
    pub span: Span,
}

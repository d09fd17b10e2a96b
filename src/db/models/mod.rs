//! Database Models

// Serde helpers
pub mod serde_helpers;

// Accounts
pub mod user;

// Catalog
pub mod brand;
pub mod parent_category;
pub mod product;
pub mod product_category;
pub mod supplier;
pub mod unit;

// Organization
pub mod branch;
pub mod staff_position;

// People
pub mod client;

// Re-exports
pub use branch::{Branch, BranchBrief, BranchId, BranchInput};
pub use brand::{Brand, BrandBrief, BrandId, BrandInput};
pub use client::{Client, ClientId, ClientInput};
pub use parent_category::{ParentCategory, ParentCategoryBrief, ParentCategoryId, ParentCategoryInput};
pub use product::{ProductDetail, ProductId, ProductInput};
pub use product_category::{
    ProductCategoryBrief, ProductCategoryDetail, ProductCategoryId, ProductCategoryInput,
};
pub use staff_position::{StaffPosition, StaffPositionId, StaffPositionInput};
pub use supplier::{Supplier, SupplierBrief, SupplierId, SupplierInput};
pub use unit::{Unit, UnitBrief, UnitId, UnitInput};
pub use user::{User, UserBrief, UserId, UserLogin, UserRegister};

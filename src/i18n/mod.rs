//! National identification numbers.

mod es;
mod ind;
mod ru;

pub use es::{es_cif, es_doi, es_nie, es_nif};
pub use ind::{ind_aadhar, ind_pan};
pub use ru::ru_inn;

pub mod rebrand;

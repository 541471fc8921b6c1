pub mod fmt;

#[cfg(test)]
pub mod fixture;
#[cfg(test)]
pub mod hash;

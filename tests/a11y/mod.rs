mod describe;
mod leaf;
mod names;
mod roles;
mod visibility;

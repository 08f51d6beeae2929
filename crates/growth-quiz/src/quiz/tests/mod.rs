mod common;
mod resolver;
mod routing;

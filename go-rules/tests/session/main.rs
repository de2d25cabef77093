
mod captures;
mod passes;
mod reset;
mod scenarios;
mod suicide;

mod batching;
mod durability;
mod ordering;

mod asynch;
mod response;

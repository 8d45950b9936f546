mod exact_bytes;

mod access_gate;
